mod auth;
pub use auth::{Login, SignUp};

mod admin;
pub use admin::{Admin, NotFound, Root};

mod pages;
pub use pages::{ArticleDetail, ArticleEdit, ArticleNew, Articles, Home, Profile, Users};

mod login;
pub use login::LoginView;

mod sign_up;
pub use sign_up::SignUpView;

mod home;
pub use home::HomeView;

mod users;
pub use users::UsersView;

mod profile;
pub use profile::ProfileView;

mod articles;
pub use articles::ArticlesView;

mod article_form;
pub use article_form::ArticleForm;

mod article_new;
pub use article_new::ArticleNewView;

mod article_edit;
pub use article_edit::ArticleEditView;

mod article_detail;
pub use article_detail::ArticleDetailView;

//! User-facing notification texts.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Message {
    SystemError,
    ProcessSuccess,
    UpdateFailed,
    UpdateSuccess,
    CreateFailed,
    DeleteConfirm,
    DeleteSuccess,
    DeleteFailed,
    CommentCreateSuccess,
    RegisterUserSuccess,
    LoginFailed,
    LoggedOut,
}

impl Message {
    pub fn text(self) -> &'static str {
        match self {
            Message::SystemError => {
                "Whoops! Something went wrong. Please contact your system administrator."
            }
            Message::ProcessSuccess => "Processing was successful.",
            Message::UpdateFailed => "Update processing failed. Please check again.",
            Message::UpdateSuccess => "Update was successful.",
            Message::CreateFailed => "Registration processing failed. Please check again.",
            Message::DeleteConfirm => "Are you sure you want to delete?",
            Message::DeleteSuccess => "Delete processing was successful",
            Message::DeleteFailed => "Delete processing failed. Please check again.",
            Message::CommentCreateSuccess => "The comment has been successfully created.",
            Message::RegisterUserSuccess => "Your account has been created. Please sign in.",
            Message::LoginFailed => "Login failed. Please check your email and password.",
            Message::LoggedOut => "You have been signed out.",
        }
    }
}

use askama::Template;

#[derive(Template)]
#[template(path = "fragments/toast.html")]
pub struct ToastTemplate {
    pub kind: &'static str,
    pub message: String,
    /// Wrap for an `hx-swap-oob` append to the toast stack.
    pub oob: bool,
}

impl ToastTemplate {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: "success",
            message: message.into(),
            oob: false,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: "error",
            message: message.into(),
            oob: false,
        }
    }

    pub fn out_of_band(mut self) -> Self {
        self.oob = true;
        self
    }
}

use crate::user;

pub trait UserMailboxTrait {
    fn full_name(&self) -> String;
    fn display_name(&self) -> Option<String>;
}

impl UserMailboxTrait for user::Model {
    fn full_name(&self) -> String {
        [self.first_name.as_str(), self.last_name.as_str()]
            .into_iter()
            .filter(|name| !name.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Unquoted; the mailer quotes it when it becomes a header.
    fn display_name(&self) -> Option<String> {
        Some(self.full_name()).filter(|name| !name.is_empty())
    }
}

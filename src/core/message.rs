/// Author of a transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    User,
    Assistant,
}

/// One conversation turn. Never mutated after it is appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_tag_roles() {
        let user = Message::user("Hello");
        assert_eq!(user.role, Role::User);
        assert_eq!(user.content, "Hello");

        let reply = Message::assistant(String::from("Hi there"));
        assert_eq!(reply.role, Role::Assistant);
        assert_eq!(reply.content, "Hi there");
    }

    #[test]
    fn content_is_kept_verbatim() {
        let message = Message::user("  padded\n");
        assert_eq!(message.content, "  padded\n");
        assert_ne!(message, Message::assistant("  padded\n"));
    }
}

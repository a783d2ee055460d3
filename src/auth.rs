use crate::models::user::Actor;

pub const ADMIN: &str = "admin";
pub const STUDENT: &str = "student";

/// Role check applied before every room mutation. A missing user or a role
/// outside the allowed set is a refusal.
pub fn authorize(actor: Option<&Actor>, allowed: &[&str]) -> bool {
    actor.map_or(false, |a| allowed.contains(&a.role.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn actor(role: &str) -> Actor {
        Actor {
            role: role.to_string(),
            email: String::new(),
        }
    }

    #[test]
    fn missing_actor_is_rejected() {
        assert!(!authorize(None, &[ADMIN]));
    }

    #[test]
    fn admin_only_rejects_student() {
        assert!(authorize(Some(&actor(ADMIN)), &[ADMIN]));
        assert!(!authorize(Some(&actor(STUDENT)), &[ADMIN]));
    }

    #[test]
    fn status_gate_accepts_admin_and_student() {
        assert!(authorize(Some(&actor(ADMIN)), &[ADMIN, STUDENT]));
        assert!(authorize(Some(&actor(STUDENT)), &[ADMIN, STUDENT]));
        assert!(!authorize(Some(&actor("guest")), &[ADMIN, STUDENT]));
        assert!(!authorize(Some(&actor("")), &[ADMIN, STUDENT]));
    }
}

use std::fmt;
use std::ops::Deref;
use zeroize::Zeroize;

/// A password value that must never appear in logs or serialized state.
///
/// - Debug / Display never print the real content
/// - memory is zeroed on drop
///
/// Unlike a strict never-clone secret this type is `Clone` and `PartialEq`:
/// the registration draft is a cloneable value object and the mismatch rule
/// compares two of these fields.
#[derive(Clone, Default)]
pub struct Secret {
    inner: String,
}

impl Secret {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            inner: value.into(),
        }
    }

    /// Borrow the inner secret as &str.
    ///
    /// Only borrowed reads are allowed; the value never leaves by accident.
    pub fn expose(&self) -> &str {
        &self.inner
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl fmt::Display for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl Deref for Secret {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.expose()
    }
}

impl PartialEq for Secret {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl Eq for Secret {}

impl From<&str> for Secret {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Secret {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl Drop for Secret {
    fn drop(&mut self) {
        self.inner.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use super::Secret;

    #[test]
    fn debug_and_display_are_redacted() {
        let secret = Secret::new("Abcdef1!");
        assert_eq!(format!("{:?}", secret), "[REDACTED]");
        assert_eq!(format!("{}", secret), "[REDACTED]");
    }

    #[test]
    fn expose_returns_the_inner_value() {
        let secret = Secret::new("Abcdef1!");
        assert_eq!(secret.expose(), "Abcdef1!");
    }

    #[test]
    fn equality_compares_inner_values() {
        assert_eq!(Secret::new("same"), Secret::new("same"));
        assert_ne!(Secret::new("one"), Secret::new("two"));
    }
}

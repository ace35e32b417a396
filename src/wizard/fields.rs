// ABOUTME: Flat store for the account-details text fields

/// Keys of the account-details form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKey {
    Name,
    Email,
    Password,
}

impl FieldKey {
    /// Fields in display order.
    pub fn all() -> &'static [FieldKey] {
        &[Self::Name, Self::Email, Self::Password]
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Full Name",
            Self::Email => "Email",
            Self::Password => "Password",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Name => "Enter your name",
            Self::Email => "Enter your email",
            Self::Password => "Create a password",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Self::Name => Self::Email,
            Self::Email => Self::Password,
            Self::Password => Self::Name,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Self::Name => Self::Password,
            Self::Email => Self::Name,
            Self::Password => Self::Email,
        }
    }
}

/// Mapping of field key to string value, all default empty.
///
/// No validation happens here; whether the fields gate progression is the
/// step predicate's concern.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFieldStore {
    name: String,
    email: String,
    password: String,
}

impl FormFieldStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: FieldKey) -> &str {
        match key {
            FieldKey::Name => &self.name,
            FieldKey::Email => &self.email,
            FieldKey::Password => &self.password,
        }
    }

    /// Replace the value unconditionally.
    pub fn set(&mut self, key: FieldKey, value: impl Into<String>) {
        let slot = match key {
            FieldKey::Name => &mut self.name,
            FieldKey::Email => &mut self.email,
            FieldKey::Password => &mut self.password,
        };
        *slot = value.into();
    }

    pub fn push_char(&mut self, key: FieldKey, c: char) {
        let mut value = self.get(key).to_string();
        value.push(c);
        self.set(key, value);
    }

    pub fn pop_char(&mut self, key: FieldKey) {
        let mut value = self.get(key).to_string();
        value.pop();
        self.set(key, value);
    }

    /// Restore all fields to empty.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn all_filled(&self) -> bool {
        FieldKey::all().iter().all(|&key| !self.get(key).is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields_default_empty() {
        let store = FormFieldStore::new();
        for &key in FieldKey::all() {
            assert_eq!(store.get(key), "");
        }
        assert!(!store.all_filled());
    }

    #[test]
    fn test_set_replaces_unconditionally() {
        let mut store = FormFieldStore::new();
        store.set(FieldKey::Email, "a@b.com");
        store.set(FieldKey::Email, "c@d.com");
        assert_eq!(store.get(FieldKey::Email), "c@d.com");
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut store = FormFieldStore::new();
        store.set(FieldKey::Name, "Ann");
        store.set(FieldKey::Email, "a@b.com");
        store.set(FieldKey::Password, "x");
        assert!(store.all_filled());

        store.reset();
        assert!(!store.all_filled());
        assert_eq!(store.get(FieldKey::Name), "");
    }

    #[test]
    fn test_char_editing() {
        let mut store = FormFieldStore::new();
        store.push_char(FieldKey::Name, 'A');
        store.push_char(FieldKey::Name, 'n');
        assert_eq!(store.get(FieldKey::Name), "An");
        store.pop_char(FieldKey::Name);
        assert_eq!(store.get(FieldKey::Name), "A");
    }

    #[test]
    fn test_focus_cycling() {
        assert_eq!(FieldKey::Name.next(), FieldKey::Email);
        assert_eq!(FieldKey::Password.next(), FieldKey::Name);
        assert_eq!(FieldKey::Name.previous(), FieldKey::Password);
    }
}

use web_sys::window;

pub const TOKEN_KEY: &str = "token";
pub const PERFIL_KEY: &str = "perfil";
pub const NOME_KEY: &str = "nome";
pub const USER_KEY: &str = "user";
pub const CURRENT_TENANT_KEY: &str = "currentTenantId";
pub const AVAILABLE_TENANTS_KEY: &str = "availableTenants";

pub const ALL_KEYS: [&str; 6] = [
    TOKEN_KEY,
    PERFIL_KEY,
    NOME_KEY,
    USER_KEY,
    CURRENT_TENANT_KEY,
    AVAILABLE_TENANTS_KEY,
];

/// Key/value persistence for the session
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);

    fn set_or_remove(&self, key: &str, value: Option<&str>) {
        match value {
            Some(v) => self.set(key, v),
            None => self.remove(key),
        }
    }
}

/// Browser `localStorage`; silently does nothing when unavailable
pub struct LocalStorage;

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

impl SessionStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        get_local_storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = get_local_storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = get_local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}

#[cfg(test)]
pub(crate) mod memory {
    use super::SessionStore;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    pub struct MemoryStore {
        pub values: RefCell<HashMap<String, String>>,
    }

    impl SessionStore for MemoryStore {
        fn get(&self, key: &str) -> Option<String> {
            self.values.borrow().get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) {
            self.values.borrow_mut().insert(key.to_string(), value.to_string());
        }

        fn remove(&self, key: &str) {
            self.values.borrow_mut().remove(key);
        }
    }
}

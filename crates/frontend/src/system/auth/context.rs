use contracts::system::auth::{LoginResponse, TenantInfo, UserInfo};
use leptos::prelude::*;

use super::storage::*;
use super::storage::LocalStorage;
use crate::shared::http::ApiClient;

/// Logged-in user and selected tenant
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionContext {
    pub token: Option<String>,
    pub perfil: Option<String>,
    pub nome: Option<String>,
    pub user: Option<UserInfo>,
    pub current_tenant_id: Option<String>,
    pub available_tenants: Vec<TenantInfo>,
}

impl SessionContext {
    pub fn load(store: &impl SessionStore) -> Self {
        Self {
            token: store.get(TOKEN_KEY).filter(|t| !t.is_empty()),
            perfil: store.get(PERFIL_KEY),
            nome: store.get(NOME_KEY),
            user: store.get(USER_KEY).and_then(|raw| serde_json::from_str(&raw).ok()),
            current_tenant_id: store.get(CURRENT_TENANT_KEY).filter(|t| !t.is_empty()),
            available_tenants: store
                .get(AVAILABLE_TENANTS_KEY)
                .and_then(|raw| serde_json::from_str(&raw).ok())
                .unwrap_or_default(),
        }
    }

    pub fn save(&self, store: &impl SessionStore) {
        store.set_or_remove(TOKEN_KEY, self.token.as_deref());
        store.set_or_remove(PERFIL_KEY, self.perfil.as_deref());
        store.set_or_remove(NOME_KEY, self.nome.as_deref());
        let user = self.user.as_ref().and_then(|u| serde_json::to_string(u).ok());
        store.set_or_remove(USER_KEY, user.as_deref());
        store.set_or_remove(CURRENT_TENANT_KEY, self.current_tenant_id.as_deref());
        let tenants = serde_json::to_string(&self.available_tenants).ok();
        store.set_or_remove(AVAILABLE_TENANTS_KEY, tenants.as_deref());
    }

    pub fn clear(store: &impl SessionStore) {
        for key in ALL_KEYS {
            store.remove(key);
        }
    }

    /// Falls back to the first tenant when the backend selects none
    pub fn from_login(response: LoginResponse) -> Self {
        let current_tenant_id = response
            .current_tenant_id
            .filter(|id| response.tenants.iter().any(|t| &t.id == id))
            .or_else(|| response.tenants.first().map(|t| t.id.clone()));
        Self {
            token: Some(response.token),
            perfil: Some(response.perfil),
            nome: Some(response.nome),
            user: Some(response.user),
            current_tenant_id,
            available_tenants: response.tenants,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Only tenants offered at login can be selected
    pub fn switch_tenant(&mut self, tenant_id: &str) -> bool {
        if self.available_tenants.iter().any(|t| t.id == tenant_id) {
            self.current_tenant_id = Some(tenant_id.to_string());
            true
        } else {
            false
        }
    }

    pub fn current_tenant(&self) -> Option<&TenantInfo> {
        let id = self.current_tenant_id.as_deref()?;
        self.available_tenants.iter().find(|t| t.id == id)
    }

    pub fn display_name(&self) -> String {
        self.nome
            .clone()
            .or_else(|| self.user.as_ref().map(|u| u.email.clone()))
            .unwrap_or_default()
    }

    pub fn client(&self) -> ApiClient {
        ApiClient::new(self.token.clone(), self.current_tenant_id.clone())
    }
}

/// Reactive handle provided by [`AuthProvider`]
#[derive(Clone, Copy)]
pub struct SessionHandle {
    pub state: RwSignal<SessionContext>,
}

impl SessionHandle {
    pub fn login(&self, response: LoginResponse) {
        let session = SessionContext::from_login(response);
        session.save(&LocalStorage);
        log::info!("session started for {}", session.display_name());
        self.state.set(session);
    }

    pub fn logout(&self) {
        SessionContext::clear(&LocalStorage);
        log::info!("session closed");
        self.state.set(SessionContext::default());
    }

    pub fn switch_tenant(&self, tenant_id: &str) {
        let switched = self.state.try_update(|s| s.switch_tenant(tenant_id)).unwrap_or(false);
        if switched {
            LocalStorage.set(CURRENT_TENANT_KEY, tenant_id);
            log::info!("tenant switched to {}", tenant_id);
        } else {
            log::warn!("tenant {} is not available for this user", tenant_id);
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.with(SessionContext::is_authenticated)
    }

    /// Client with the credentials of this moment
    pub fn client(&self) -> ApiClient {
        self.state.with_untracked(SessionContext::client)
    }
}

/// Restores the persisted session and provides [`SessionHandle`]
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let state = RwSignal::new(SessionContext::load(&LocalStorage));
    provide_context(SessionHandle { state });
    children()
}

/// Hook to access the session
pub fn use_auth() -> SessionHandle {
    use_context::<SessionHandle>().expect("AuthProvider not found in component tree")
}

#[cfg(test)]
mod tests {
    use super::super::storage::memory::MemoryStore;
    use super::*;

    fn response() -> LoginResponse {
        LoginResponse {
            token: "jwt-123".into(),
            perfil: "nutricionista".into(),
            nome: "Ana".into(),
            user: UserInfo { id: 7, email: "ana@semed.gov.br".into(), nome: Some("Ana".into()) },
            tenants: vec![
                TenantInfo { id: "t1".into(), nome: "Secretaria A".into() },
                TenantInfo { id: "t2".into(), nome: "Secretaria B".into() },
            ],
            current_tenant_id: None,
        }
    }

    #[test]
    fn test_login_selects_first_tenant() {
        let session = SessionContext::from_login(response());
        assert!(session.is_authenticated());
        assert_eq!(session.current_tenant_id.as_deref(), Some("t1"));
        assert_eq!(session.current_tenant().map(|t| t.nome.as_str()), Some("Secretaria A"));
    }

    #[test]
    fn test_persist_and_restore() {
        let store = MemoryStore::default();
        let session = SessionContext::from_login(response());
        session.save(&store);
        assert_eq!(store.get(TOKEN_KEY).as_deref(), Some("jwt-123"));
        assert_eq!(store.get(CURRENT_TENANT_KEY).as_deref(), Some("t1"));
        assert_eq!(SessionContext::load(&store), session);

        SessionContext::clear(&store);
        assert!(store.values.borrow().is_empty());
        assert_eq!(SessionContext::load(&store), SessionContext::default());
    }

    #[test]
    fn test_switch_tenant_only_to_available() {
        let mut session = SessionContext::from_login(response());
        assert!(session.switch_tenant("t2"));
        assert!(!session.switch_tenant("t9"));
        assert_eq!(session.current_tenant_id.as_deref(), Some("t2"));
    }

    #[test]
    fn test_client_headers_follow_session() {
        let mut session = SessionContext::from_login(response());
        session.switch_tenant("t2");
        let headers = session.client().headers();
        assert_eq!(headers[0], ("Authorization", "Bearer jwt-123".to_string()));
        assert_eq!(headers[1], ("X-Tenant-ID", "t2".to_string()));
    }

    #[test]
    fn test_corrupt_json_is_ignored() {
        let store = MemoryStore::default();
        store.set(TOKEN_KEY, "abc");
        store.set(USER_KEY, "{not json");
        store.set(AVAILABLE_TENANTS_KEY, "[");
        let session = SessionContext::load(&store);
        assert!(session.is_authenticated());
        assert_eq!(session.user, None);
        assert!(session.available_tenants.is_empty());
    }
}

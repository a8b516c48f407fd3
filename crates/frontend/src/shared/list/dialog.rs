//! Create/edit dialog and delete confirmation state machines

use contracts::domain::common::EntityId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogMode {
    Create,
    Edit(EntityId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogPhase {
    Closed,
    Open,
    Submitting,
}

/// Form snapshot accepted for submission
#[derive(Debug, Clone, PartialEq)]
pub struct Submission<P> {
    pub mode: DialogMode,
    pub payload: P,
}

/// Dialog holding a form of type `F`
///
/// `Closed -> Open -> Submitting -> Closed` on success, back to `Open` with
/// an inline error on failure. Submitting is only accepted from `Open`.
#[derive(Debug, Clone, PartialEq)]
pub struct CrudDialog<F> {
    phase: DialogPhase,
    mode: DialogMode,
    form: F,
    error: Option<String>,
}

impl<F: Default> Default for CrudDialog<F> {
    fn default() -> Self {
        Self {
            phase: DialogPhase::Closed,
            mode: DialogMode::Create,
            form: F::default(),
            error: None,
        }
    }
}

impl<F: Clone + Default> CrudDialog<F> {
    pub fn open_create(&mut self) {
        self.open(DialogMode::Create, F::default());
    }

    pub fn open_edit(&mut self, id: EntityId, form: F) {
        self.open(DialogMode::Edit(id), form);
    }

    fn open(&mut self, mode: DialogMode, form: F) {
        if self.phase == DialogPhase::Submitting {
            return;
        }
        self.phase = DialogPhase::Open;
        self.mode = mode;
        self.form = form;
        self.error = None;
    }

    /// Ignored unless the dialog is open and idle
    pub fn edit_form(&mut self, change: impl FnOnce(&mut F)) {
        if self.phase == DialogPhase::Open {
            change(&mut self.form);
        }
    }

    /// Runs local checks and moves to `Submitting`
    ///
    /// Returns the converted payload when the submission was accepted. A
    /// failed check stays `Open` with the message set.
    pub fn begin_submit<P>(&mut self, check: impl FnOnce(&F) -> Result<P, String>) -> Option<Submission<P>> {
        if self.phase != DialogPhase::Open {
            return None;
        }
        match check(&self.form) {
            Ok(payload) => {
                self.phase = DialogPhase::Submitting;
                self.error = None;
                Some(Submission { mode: self.mode, payload })
            }
            Err(message) => {
                self.error = Some(message);
                None
            }
        }
    }

    pub fn submit_failed(&mut self, message: impl Into<String>) {
        if self.phase == DialogPhase::Submitting {
            self.phase = DialogPhase::Open;
            self.error = Some(message.into());
        }
    }

    pub fn submit_succeeded(&mut self) {
        if self.phase == DialogPhase::Submitting {
            *self = Self::default();
        }
    }

    /// Cancel; refused while a request is in flight
    pub fn close(&mut self) {
        if self.phase == DialogPhase::Open {
            *self = Self::default();
        }
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }
}

impl<F> CrudDialog<F> {
    pub fn phase(&self) -> DialogPhase {
        self.phase
    }

    pub fn mode(&self) -> DialogMode {
        self.mode
    }

    pub fn is_open(&self) -> bool {
        self.phase != DialogPhase::Closed
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == DialogPhase::Submitting
    }

    pub fn form(&self) -> &F {
        &self.form
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

/// Record selected for deletion
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteTarget {
    pub id: EntityId,
    pub label: String,
}

/// Accepted delete call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteRequest {
    pub id: EntityId,
    pub force: bool,
}

/// Delete confirmation
///
/// When the backend reports blocking dependencies the dialog switches to a
/// blocked state and confirm stays disabled until `force` is checked.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeleteConfirm {
    target: Option<DeleteTarget>,
    dependencies: Vec<(String, u64)>,
    force: bool,
    processing: bool,
    error: Option<String>,
}

impl DeleteConfirm {
    pub fn request(&mut self, id: EntityId, label: impl Into<String>) {
        if self.processing {
            return;
        }
        *self = Self {
            target: Some(DeleteTarget { id, label: label.into() }),
            ..Self::default()
        };
    }

    pub fn cancel(&mut self) {
        if !self.processing {
            *self = Self::default();
        }
    }

    pub fn set_force(&mut self, force: bool) {
        if self.is_blocked() && !self.processing {
            self.force = force;
        }
    }

    pub fn confirm_enabled(&self) -> bool {
        self.target.is_some() && !self.processing && (!self.is_blocked() || self.force)
    }

    pub fn begin(&mut self) -> Option<DeleteRequest> {
        if !self.confirm_enabled() {
            return None;
        }
        let target = self.target.as_ref()?;
        self.processing = true;
        self.error = None;
        Some(DeleteRequest {
            id: target.id,
            force: self.is_blocked() && self.force,
        })
    }

    /// A non-empty dependency list switches to the blocked state
    pub fn fail(&mut self, message: impl Into<String>, dependencies: Vec<(String, u64)>) {
        self.processing = false;
        if dependencies.is_empty() {
            self.error = Some(message.into());
        } else {
            self.dependencies = dependencies;
            self.force = false;
            self.error = None;
        }
    }

    pub fn succeed(&mut self) {
        *self = Self::default();
    }

    pub fn is_open(&self) -> bool {
        self.target.is_some()
    }

    pub fn is_blocked(&self) -> bool {
        !self.dependencies.is_empty()
    }

    pub fn is_processing(&self) -> bool {
        self.processing
    }

    pub fn force(&self) -> bool {
        self.force
    }

    pub fn target(&self) -> Option<&DeleteTarget> {
        self.target.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// One line per blocking dependency, e.g. "produtos: 3"
    pub fn dependency_lines(&self) -> Vec<String> {
        self.dependencies
            .iter()
            .map(|(name, count)| format!("{}: {}", name, count))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Form {
        nome: String,
        ativo: bool,
    }

    impl Default for Form {
        fn default() -> Self {
            Self { nome: String::new(), ativo: true }
        }
    }

    fn required(f: &Form) -> Result<String, String> {
        if f.nome.trim().is_empty() {
            Err("Nome é obrigatório".into())
        } else {
            Ok(f.nome.trim().to_string())
        }
    }

    #[test]
    fn test_create_submit_success_closes() {
        let mut d: CrudDialog<Form> = CrudDialog::default();
        d.open_create();
        assert_eq!(d.form(), &Form::default());
        d.edit_form(|f| f.nome = " Rota Norte ".into());

        let sub = d.begin_submit(required).unwrap();
        assert_eq!(sub.mode, DialogMode::Create);
        assert_eq!(sub.payload, "Rota Norte");
        assert!(d.is_submitting());

        d.submit_succeeded();
        assert_eq!(d.phase(), DialogPhase::Closed);
    }

    #[test]
    fn test_validation_keeps_dialog_open() {
        let mut d: CrudDialog<Form> = CrudDialog::default();
        d.open_create();
        assert!(d.begin_submit(required).is_none());
        assert_eq!(d.phase(), DialogPhase::Open);
        assert_eq!(d.error(), Some("Nome é obrigatório"));
    }

    #[test]
    fn test_double_submit_is_rejected() {
        let mut d: CrudDialog<Form> = CrudDialog::default();
        d.open_edit(4, Form { nome: "Escola".into(), ativo: false });
        assert!(d.begin_submit(required).is_some());
        assert!(d.begin_submit(required).is_none());
        d.close();
        assert!(d.is_open());
        d.edit_form(|f| f.nome.clear());
        assert_eq!(d.form().nome, "Escola");
    }

    #[test]
    fn test_backend_rejection_reopens_with_error() {
        let mut d: CrudDialog<Form> = CrudDialog::default();
        d.open_edit(9, Form { nome: "X".into(), ativo: true });
        let sub = d.begin_submit(required).unwrap();
        assert_eq!(sub.mode, DialogMode::Edit(9));
        d.submit_failed("CNPJ já cadastrado");
        assert_eq!(d.phase(), DialogPhase::Open);
        assert_eq!(d.error(), Some("CNPJ já cadastrado"));
        assert_eq!(d.mode(), DialogMode::Edit(9));
    }

    #[test]
    fn test_closed_dialog_ignores_submit() {
        let mut d: CrudDialog<Form> = CrudDialog::default();
        assert!(d.begin_submit(required).is_none());
        d.submit_failed("x");
        assert_eq!(d.phase(), DialogPhase::Closed);
        assert_eq!(d.error(), None);
    }

    #[test]
    fn test_blocked_delete_state_requires_force() {
        let mut del = DeleteConfirm::default();
        del.request(12, "Contrato 001/2024");
        assert!(del.confirm_enabled());

        let first = del.begin().unwrap();
        assert_eq!(first, DeleteRequest { id: 12, force: false });
        del.fail("Contrato possui dependências", vec![("produtos".into(), 3)]);

        assert!(del.is_blocked());
        assert!(!del.confirm_enabled());
        assert_eq!(del.dependency_lines(), vec!["produtos: 3".to_string()]);

        del.set_force(true);
        assert!(del.confirm_enabled());
        let forced = del.begin().unwrap();
        assert_eq!(forced, DeleteRequest { id: 12, force: true });
        assert!(!del.confirm_enabled());

        del.succeed();
        assert!(!del.is_open());
    }

    #[test]
    fn test_delete_plain_failure_shows_error() {
        let mut del = DeleteConfirm::default();
        del.request(1, "Rota A");
        del.set_force(true);
        assert!(!del.force());
        assert!(del.begin().is_some());
        del.fail("Erro ao excluir.", Vec::new());
        assert!(!del.is_blocked());
        assert_eq!(del.error(), Some("Erro ao excluir."));
        assert!(del.confirm_enabled());
    }
}

use contracts::domain::a001_escola::aggregate::{Escola, EscolaModalidade};
use contracts::domain::a002_modalidade::aggregate::Modalidade;
use contracts::domain::a008_rota::aggregate::Rota;
use contracts::domain::common::{EntityId, EntityRecord};
use futures::future::{FutureExt, LocalBoxFuture};

use crate::shared::api_utils::nested_path;
use crate::shared::http::{ApiClient, ApiError};
use crate::shared::list::lookup::LookupTable;

pub const LOAD_ERROR: &str = "Erro ao carregar a escola. Tente novamente.";

/// Escola with its enrollments and the collections they reference
#[derive(Debug, Clone, PartialEq)]
pub struct EscolaBundle {
    pub escola: Escola,
    pub matriculas: Vec<EscolaModalidade>,
    pub modalidades: LookupTable<Modalidade>,
    pub rotas: LookupTable<Rota>,
}

pub fn matriculas_path(escola_id: EntityId) -> String {
    nested_path(&Escola::api_path(), escola_id, "modalidades")
}

pub fn load(client: ApiClient, id: EntityId) -> LocalBoxFuture<'static, Result<EscolaBundle, ApiError>> {
    async move {
        let escola_path = Escola::api_path();
        let matriculas_path = matriculas_path(id);
        let modalidades_path = Modalidade::api_path();
        let rotas_path = Rota::api_path();
        let (escola, matriculas, modalidades, rotas) = futures::join!(
            client.buscar::<Escola>(&escola_path, id),
            client.listar::<EscolaModalidade>(&matriculas_path),
            client.listar_ou_vazio::<Modalidade>(&modalidades_path),
            client.listar_ou_vazio::<Rota>(&rotas_path),
        );
        Ok(EscolaBundle {
            escola: escola?,
            matriculas: matriculas?,
            modalidades: LookupTable::build(&modalidades),
            rotas: LookupTable::build(&rotas),
        })
    }
    .boxed_local()
}

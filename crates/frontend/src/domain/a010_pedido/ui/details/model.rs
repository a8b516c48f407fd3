use contracts::domain::a003_fornecedor::aggregate::Fornecedor;
use contracts::domain::a005_produto::aggregate::Produto;
use contracts::domain::a010_pedido::aggregate::Pedido;
use contracts::domain::common::{EntityId, EntityRecord};
use futures::future::{FutureExt, LocalBoxFuture};

use crate::shared::http::{ApiClient, ApiError};
use crate::shared::list::lookup::LookupTable;

pub const LOAD_ERROR: &str = "Erro ao carregar o pedido. Tente novamente.";

#[derive(Debug, Clone, PartialEq)]
pub struct PedidoBundle {
    pub pedido: Pedido,
    pub fornecedores: LookupTable<Fornecedor>,
    pub produtos: LookupTable<Produto>,
}

pub fn load(client: ApiClient, id: EntityId) -> LocalBoxFuture<'static, Result<PedidoBundle, ApiError>> {
    async move {
        let pedido_path = Pedido::api_path();
        let fornecedores_path = Fornecedor::api_path();
        let produtos_path = Produto::api_path();
        let (pedido, fornecedores, produtos) = futures::join!(
            client.buscar::<Pedido>(&pedido_path, id),
            client.listar_ou_vazio::<Fornecedor>(&fornecedores_path),
            client.listar_ou_vazio::<Produto>(&produtos_path),
        );
        Ok(PedidoBundle {
            pedido: pedido?,
            fornecedores: LookupTable::build(&fornecedores),
            produtos: LookupTable::build(&produtos),
        })
    }
    .boxed_local()
}

use contracts::domain::a003_fornecedor::aggregate::Fornecedor;
use contracts::domain::a004_contrato::aggregate::{Contrato, ContratoProduto};
use contracts::domain::a005_produto::aggregate::Produto;
use contracts::domain::common::{EntityId, EntityRecord};
use futures::future::{FutureExt, LocalBoxFuture};

use crate::shared::api_utils::nested_path;
use crate::shared::http::{ApiClient, ApiError};
use crate::shared::list::lookup::LookupTable;

pub const LOAD_ERROR: &str = "Erro ao carregar o contrato. Tente novamente.";

#[derive(Debug, Clone, PartialEq)]
pub struct ContratoBundle {
    pub contrato: Contrato,
    pub itens: Vec<ContratoProduto>,
    pub produtos: LookupTable<Produto>,
    pub fornecedores: LookupTable<Fornecedor>,
}

impl ContratoBundle {
    pub fn unidade_of(&self, produto_id: EntityId) -> String {
        self.produtos
            .get(produto_id)
            .and_then(|p| p.unidade.clone())
            .unwrap_or_default()
    }
}

pub fn itens_path(contrato_id: EntityId) -> String {
    nested_path(&Contrato::api_path(), contrato_id, "produtos")
}

pub fn load(client: ApiClient, id: EntityId) -> LocalBoxFuture<'static, Result<ContratoBundle, ApiError>> {
    async move {
        let contrato_path = Contrato::api_path();
        let itens_path = itens_path(id);
        let produtos_path = Produto::api_path();
        let fornecedores_path = Fornecedor::api_path();
        let (contrato, itens, produtos, fornecedores) = futures::join!(
            client.buscar::<Contrato>(&contrato_path, id),
            client.listar::<ContratoProduto>(&itens_path),
            client.listar_ou_vazio::<Produto>(&produtos_path),
            client.listar_ou_vazio::<Fornecedor>(&fornecedores_path),
        );
        Ok(ContratoBundle {
            contrato: contrato?,
            itens: itens?,
            produtos: LookupTable::build(&produtos),
            fornecedores: LookupTable::build(&fornecedores),
        })
    }
    .boxed_local()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_unidade_of_falls_back_to_empty() {
        let produto = Produto {
            id: 2,
            nome: "Feijão".into(),
            descricao: None,
            categoria: None,
            unidade: Some("kg".into()),
            perecivel: false,
            ativo: true,
        };
        let bundle = ContratoBundle {
            contrato: Contrato {
                id: 1,
                numero: "12/2024".into(),
                fornecedor_id: 9,
                data_inicio: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
                data_fim: NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
                valor_total: None,
                ativo: true,
            },
            itens: Vec::new(),
            produtos: LookupTable::build(&[produto]),
            fornecedores: LookupTable::default(),
        };
        assert_eq!(bundle.unidade_of(2), "kg");
        assert_eq!(bundle.unidade_of(3), "");
        assert_eq!(itens_path(1), "/api/contratos/1/produtos");
    }
}

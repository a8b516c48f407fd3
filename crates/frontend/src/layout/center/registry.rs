//! Page registry - the single mapping from [`PageRoute`] to its view

use crate::domain::a001_escola::ui::details::EscolaDetails;
use crate::domain::a001_escola::ui::list::EscolaList;
use crate::domain::a002_modalidade::ui::list::ModalidadeList;
use crate::domain::a003_fornecedor::ui::list::FornecedorList;
use crate::domain::a004_contrato::ui::details::ContratoDetails;
use crate::domain::a004_contrato::ui::list::ContratoList;
use crate::domain::a005_produto::ui::list::ProdutoList;
use crate::domain::a006_refeicao::ui::list::RefeicaoList;
use crate::domain::a007_cardapio::ui::list::CardapioList;
use crate::domain::a008_rota::ui::list::RotaList;
use crate::domain::a009_estoque::ui::list::EstoqueList;
use crate::domain::a010_pedido::ui::details::PedidoDetails;
use crate::domain::a010_pedido::ui::list::PedidoList;
use crate::layout::global_context::PageRoute;
use crate::system::pages::dashboard::DashboardPage;
use leptos::prelude::*;

pub fn render_page(route: PageRoute) -> AnyView {
    match route {
        PageRoute::Dashboard => view! { <DashboardPage /> }.into_any(),

        // Cadastros
        PageRoute::Escolas => view! { <EscolaList /> }.into_any(),
        PageRoute::EscolaDetalhe(id) => view! { <EscolaDetails id=id /> }.into_any(),
        PageRoute::Modalidades => view! { <ModalidadeList /> }.into_any(),
        PageRoute::Rotas => view! { <RotaList /> }.into_any(),
        PageRoute::Produtos => view! { <ProdutoList /> }.into_any(),
        PageRoute::Refeicoes => view! { <RefeicaoList /> }.into_any(),
        PageRoute::Cardapios => view! { <CardapioList /> }.into_any(),

        // Compras
        PageRoute::Fornecedores => view! { <FornecedorList /> }.into_any(),
        PageRoute::Contratos => view! { <ContratoList /> }.into_any(),
        PageRoute::ContratoDetalhe(id) => view! { <ContratoDetails id=id /> }.into_any(),
        PageRoute::Pedidos => view! { <PedidoList /> }.into_any(),
        PageRoute::PedidoDetalhe(id) => view! { <PedidoDetails id=id /> }.into_any(),

        PageRoute::Estoque => view! { <EstoqueList /> }.into_any(),
    }
}

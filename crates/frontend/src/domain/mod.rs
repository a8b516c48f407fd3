pub mod a001_escola;
pub mod a002_modalidade;
pub mod a003_fornecedor;
pub mod a004_contrato;
pub mod a005_produto;
pub mod a006_refeicao;
pub mod a007_cardapio;
pub mod a008_rota;
pub mod a009_estoque;
pub mod a010_pedido;

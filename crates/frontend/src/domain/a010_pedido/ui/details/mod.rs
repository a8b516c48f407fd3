mod model;
mod view;

pub use view::PedidoDetails;

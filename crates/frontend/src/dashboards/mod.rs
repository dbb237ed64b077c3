pub mod d001_municipio_graph;

pub use d001_municipio_graph::ui::MunicipioGraphDashboard;

pub mod d001_municipio_graph;

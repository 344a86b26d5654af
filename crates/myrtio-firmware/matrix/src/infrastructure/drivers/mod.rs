mod matrix_bus;

pub(crate) use matrix_bus::init_matrix_bus;

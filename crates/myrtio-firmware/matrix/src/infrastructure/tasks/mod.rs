pub(crate) mod matrix_composer;

pub(crate) use matrix_composer::matrix_composer_task;

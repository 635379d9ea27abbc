mod builder_test;
mod mio_test;
mod mosa_test;
mod random_test;
mod sorting_test;

mod one_max_test;
mod single_bit_test;
mod statement_test;

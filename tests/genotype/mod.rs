mod bit_string_test;
mod event_sequence_test;
mod integer_list_test;

mod single_point_relative_test;

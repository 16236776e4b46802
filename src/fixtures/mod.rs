pub mod data_generator;

pub mod dict_ops;

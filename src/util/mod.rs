// Utility Module

pub mod file_ops;

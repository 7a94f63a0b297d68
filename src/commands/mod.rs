pub mod clear;

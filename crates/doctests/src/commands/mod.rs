pub mod doctest;

pub use rank::test_rank;

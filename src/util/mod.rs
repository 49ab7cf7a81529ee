/// Set of functions used to assure the correctness of computed hulls
pub mod assertions;

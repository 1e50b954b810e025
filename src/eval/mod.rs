pub(crate) mod evaluator;

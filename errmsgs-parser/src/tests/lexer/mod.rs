use super::*;
mod reader;
mod tokenizer;

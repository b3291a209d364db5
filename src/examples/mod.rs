//! Ready-made problem encoders, used by the runnable demos and as worked
//! examples of driving the solver.

pub mod map_colouring;
pub mod sudoku;

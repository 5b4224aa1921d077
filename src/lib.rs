pub mod configuration;

pub mod gallery;

pub mod math {
    pub mod function {
        pub mod unaryfunction;
        pub mod algebra;
    }

    pub mod calculus {
        pub mod derivative;
        pub mod integral;
    }

    pub mod solver {
        pub mod solvererror;
        pub mod rootfinder;
        pub mod brentsolver;
        pub mod inverter;
    }
}

pub mod plot {
    pub mod point;
    pub mod canvas;
    pub mod plotter;
}

pub use math::function::unaryfunction::{
    RealFunction,
    UnaryFunction
};

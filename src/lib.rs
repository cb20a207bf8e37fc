pub mod configuration;

pub mod gradient {
    pub mod gradienterror;
    pub mod spacing;
    pub mod inputvalidator;
    pub mod knotspacing;
    pub mod segmentintegrator;
    pub mod cumulativeassembler;
    pub mod intgrad;
    pub mod arrayinterface;
}

pub mod math {
    pub mod curve {
        pub mod curve;
        pub mod curveerror;
        pub mod nonparametriccurve {
            pub mod nonparametriccurve;
            pub mod piecewisepolynomial;
        }
    }
}

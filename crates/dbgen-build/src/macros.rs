//! Build-script helper that runs dbgen codegen for one model source file.
//!
//! Outputs land in `OUT_DIR`, one `<entity>.gen.rs` per type; pull them in
//! next to the types with `include!(concat!(env!("OUT_DIR"), "/user.gen.rs"))`.
//! A `dbgen.toml` in the crate root is honoured. Every failure is returned
//! with `?`, so call it from a `build.rs` `main` returning
//! `Result<(), Box<dyn std::error::Error>>`; the block evaluates to the
//! written paths.
#[macro_export]
macro_rules! build {
    ($source:expr) => {{
        use std::{env::var, path::PathBuf};

        let source = $source;

        //
        // CARGO
        //

        println!("cargo:rerun-if-changed=build.rs");
        println!("cargo:rerun-if-changed={source}");
        println!("cargo:rerun-if-changed={}", ::dbgen_build::config::CONFIG_FILE);

        // output directory set by Cargo
        let out_dir = PathBuf::from(var("OUT_DIR")?);

        //
        // ACCESSOR CODE
        //

        let config = ::dbgen_build::config::Config::discover(None, ::std::path::Path::new("."))?;
        let files = ::dbgen_build::Generator::new(config)
            .generate_path(::std::path::Path::new(&source))?;

        ::dbgen_build::write_files(&out_dir, &files)?
    }};
}

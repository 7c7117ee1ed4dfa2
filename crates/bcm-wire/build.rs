fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Pure-Rust proto parser, so the build does not need `protoc` on PATH
    let descriptors = protox::compile(["proto/boundary_models.proto"], ["proto"])?;

    prost_build::Config::new().compile_fds(descriptors)?;

    println!("cargo:rerun-if-changed=proto/boundary_models.proto");

    Ok(())
}

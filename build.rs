fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed=proto/sum.proto");

    let protoc = protoc_bin_vendored::protoc_bin_path().map_err(|e| format!("protoc not available: {:?}", e))?;
    std::env::set_var("PROTOC", protoc);

    // Server stubs are only needed by the integration tests' in-memory service
    tonic_build::configure()
        .build_client(true)
        .build_server(true)
        .compile(&["proto/sum.proto"], &["proto"])?;

    Ok(())
}

use optfile::{AppContext, Options};

fn main() -> Result<(), optfile::Error> {
    // Plain stderr output for the option trace; RUST_LOG is not consulted here.
    let subscriber = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);

    // File settings first, then `key=value` arguments on top
    let mut ctx = AppContext::builder()
        .with_options(
            Options::builder()
                .with_file("demos/BOUT.inp", true)
                .with_args(std::env::args())
                .build()?,
        )
        .build()?;

    let options = ctx.options_mut();
    let nout: i32 = options.get("nout", 1)?;
    let timestep: f64 = options.get("timestep", 1.0)?;
    let nx: i32 = options.get_in("mesh", "nx", 64)?;
    let order: i32 = options.get_either("ni", "all", "order", 2)?;
    let restart: bool = options.get("restart", false)?;

    println!("nout={nout} timestep={timestep} nx={nx} order={order} restart={restart}");

    ctx.finish();
    Ok(())
}

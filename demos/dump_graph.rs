use framewise::{
    Color, Constrain, ConstraintMode, EncoderPreset, Gravity, ImageflowTool, Input, Output, Steps,
};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (input, out_dir) = match args.as_slice() {
        [input, out_dir] => (Some(input.clone()), out_dir.clone()),
        _ => (None, "out".to_string()),
    };

    let source = match &input {
        Some(path) => Input::file(path),
        None => Input::bytes(Vec::new()),
    };

    let steps = Steps::new()
        .decode(source)
        .branch(|s| {
            s.constrain(
                Constrain::new(ConstraintMode::FitPad)
                    .w(400.0)
                    .h(400.0)
                    .gravity(Gravity::Center)
                    .canvas_color(Color::hex("#ffffff")),
            )
            .encode(
                Output::file(format!("{out_dir}/square.jpg")),
                EncoderPreset::mozjpeg_quality(85),
            )
        })
        .constrain_within_w(1200.0)
        .sepia()
        .lossy_webp(Output::file(format!("{out_dir}/sepia.webp")), 80.0);

    steps.validate()?;
    println!("{}", steps.to_json_pretty()?);

    // Only execute when given a real input.
    if input.is_some() {
        let results = steps.execute(&ImageflowTool::from_env())?;
        for (label, bytes) in &results {
            eprintln!("dump_graph: wrote {label} ({} bytes)", bytes.len());
        }
    }
    Ok(())
}

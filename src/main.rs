// SPDX: CC0-1.0

use anyhow::Context;
use chrono::{DateTime, Local};
use std::{
    fs::OpenOptions,
    io::{stdout, BufWriter, Write},
    process::ExitCode,
};
use vector_grapher::{
    shell::{self, Command},
    Graph, Segment, Viewport,
};

// the original window size
const DEFAULT_VIEWPORT: Viewport = Viewport {
    width: 1000,
    height: 750,
};

fn output_svg_filename(now: DateTime<Local>) -> String {
    format!(
        "{}_output-{}.{}",
        env!("CARGO_PKG_NAME"),
        now.format("%Y-%m-%d_%H-%M-%S"),
        "svg"
    )
}

fn main() -> ExitCode {
    match try_main() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("unexpected error: {err}");
            let chain = err.chain();
            if chain.len() > 1 {
                eprintln!();
                eprintln!("context:");
                for it in chain.skip(1) {
                    eprintln!("  {it}");
                }
            }
            ExitCode::FAILURE
        }
    }
}

#[derive(Debug)]
struct State {
    graph: Graph,
    viewport: Viewport,
}

fn try_main() -> anyhow::Result<()> {
    let mut state = State {
        graph: Graph::new(),
        viewport: DEFAULT_VIEWPORT,
    };

    let mut stdout = BufWriter::new(stdout());
    loop {
        writeln!(stdout, "f(x) = {}", state.graph.expression())?;

        let mut try_cmd = shell::input(&mut stdout, "> ")?;
        try_cmd.make_ascii_lowercase();
        writeln!(stdout)?;

        if let Ok(cmd) = try_cmd.parse::<Command>() {
            match cmd {
                Command::Help => {
                    for c in Command::exhaustive() {
                        writeln!(stdout, "{name}: {help}", name = c.name(), help = c.help())?;
                    }
                }

                Command::Quit => break,

                Command::SetExpr => set_expr(&mut stdout, &mut state)?,

                Command::SetVector => set_vector(&mut stdout, &mut state)?,

                Command::SetSize => set_size(&mut stdout, &mut state)?,

                Command::Render => render(&mut stdout, &state)?,
            }
        } else {
            writeln!(stdout, r#"Unknown command, try "help" for help"#)?;
            if let Some(cmd) = shell::similar_command(&try_cmd) {
                writeln!(stdout, "note: command '{}' has a similar name", cmd.name())?;
            }
        }

        writeln!(stdout)?;
    }
    stdout.flush()?;
    Ok(())
}

fn set_expr<W: Write>(mut out: W, state: &mut State) -> anyhow::Result<()> {
    let input = shell::input(&mut out, "f(x) = ")?;
    if input.is_empty() {
        return Ok(());
    }
    state.graph.set_expression(input);
    Ok(())
}

fn set_vector<W: Write>(mut out: W, state: &mut State) -> anyhow::Result<()> {
    let input = shell::input(&mut out, "vector ('dx,dy' or 'dx,dy;x0,y0') = ")?;
    if input.is_empty() {
        return Ok(());
    }

    if let Err(err) = state.graph.set_vector(&input) {
        writeln!(out)?;
        let start = input.find(&err.text).unwrap_or(0);
        shell::underline(&mut out, &input, start, err.text.len())?;
        writeln!(out, "parse error: {err}")?;
        writeln!(out, "note: the previous vector is kept")?;
    }
    Ok(())
}

fn set_size<W: Write>(mut out: W, state: &mut State) -> anyhow::Result<()> {
    writeln!(out, "viewport = {}", state.viewport)?;
    writeln!(out)?;
    writeln!(out, "note: leave blank to skip")?;

    for (name, dst) in [
        ("width", &mut state.viewport.width),
        ("height", &mut state.viewport.height),
    ] {
        match shell::read_fromstr::<_, i32>(
            &mut out,
            format_args!("?{name} (is {cur}) = ", cur = *dst),
            true,
        )? {
            Ok(Some(new)) => *dst = new,
            Ok(None) => {}
            Err(_) => return Ok(()),
        }
    }

    Ok(())
}

fn render<W: Write>(mut out: W, state: &State) -> anyhow::Result<()> {
    let segments = state.graph.render(state.viewport);

    let svg_path = output_svg_filename(Local::now());
    let mut svg = BufWriter::new(
        OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&svg_path)
            .context("failed to open output svg file")?,
    );

    write_svg(&mut svg, state.viewport, &segments).context("failed to write output svg file")?;
    svg.flush()?;
    svg.get_mut().sync_data()?;
    drop(svg);

    writeln!(out, "rendered {} segments to '{svg_path}'", segments.len())?;
    Ok(())
}

fn write_svg<W: Write>(mut out: W, viewport: Viewport, segments: &[Segment]) -> std::io::Result<()> {
    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = viewport.width,
        h = viewport.height,
    )?;
    writeln!(
        out,
        r##"  <rect width="{w}" height="{h}" fill="#ffffff"/>"##,
        w = viewport.width,
        h = viewport.height,
    )?;
    for seg in segments {
        writeln!(
            out,
            r#"  <line x1="{x1}" y1="{y1}" x2="{x2}" y2="{y2}" stroke="{color}" stroke-width="2"/>"#,
            x1 = seg.from.x,
            y1 = seg.from.y,
            x2 = seg.to.x,
            y2 = seg.to.y,
            color = seg.color.rgb(),
        )?;
    }
    writeln!(out, "</svg>")?;
    Ok(())
}

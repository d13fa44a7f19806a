use miette::Result;
use pxgen::output::Printer;

fn main() -> Result<()> {
    pxgen::generate(&pxgen::default_output_dir(), &Printer::new())?;
    Ok(())
}

use crate::cli::args::CliArgs;
use crate::output::OutputFormat;

pub fn validate(args: &CliArgs) -> Result<(), String> {
    if let Some(raw) = args.output_format.as_deref() {
        if OutputFormat::parse(raw).is_none() {
            return Err(format!(
                "invalid --output-format '{raw}', expected text, json, or html"
            ));
        }
    }
    if args.department.is_some() && args.role.is_some() {
        return Err("use either --department or --role, not both".to_string());
    }
    let searching = args.first_name.is_some() || args.last_name.is_some();
    if searching && (args.department.is_some() || args.role.is_some()) {
        return Err(
            "name search always covers the whole directory; drop --department/--role".to_string(),
        );
    }
    if args
        .first_name
        .as_deref()
        .is_some_and(|name| !name.is_empty())
        && args.last_name.is_some()
    {
        return Err("use either --first-name or --last-name, not both".to_string());
    }
    if args.interactive && args.output.is_some() {
        return Err("--interactive writes to the terminal; drop --output".to_string());
    }
    Ok(())
}

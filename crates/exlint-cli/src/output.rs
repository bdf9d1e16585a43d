use serde::Serialize;

/// Print a serializable response as pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}

/// Print tab-separated rows on stdout.
pub fn print_rows<'a, I>(rows: I)
where
    I: IntoIterator<Item = [&'a str; 2]>,
{
    for [left, right] in rows {
        println!("{left}\t{right}");
    }
}

use colored::Colorize;

pub fn print_help() {
    println!("{:━^60}", " MEDIAGEN ".yellow());
    println!("Usage:");
    println!("  {} [option] <arguments>", "mediagen".bold().green());
    println!("\nOptions:");
    println!(
        "  {}   Generate an image and download it.",
        "i".bold().green()
    );
    println!(
        "  {}   Download the output of a finished video task.",
        "v".bold().cyan()
    );
    println!(
        "  {}   Check the status of a video task.",
        "s".bold().magenta()
    );
    println!(
        "  {}   Rank embeddings and select the top of each cluster.",
        "r".bold().red()
    );
    println!(
        "  {}     Display this help message.",
        "-h, -help".bold().blue()
    );
    println!("\nArguments:");
    println!(
        "  {}  Prompt, optional output file, aspect ratio and negative prompt.",
        "i <prompt> [output] [aspect] [negative]".bold().green()
    );
    println!(
        "  {}  Task id (defaults to the built-in one).",
        "v [task_id]".bold().cyan()
    );
    println!(
        "  {}  Task id (defaults to the built-in one).",
        "s [task_id]".bold().magenta()
    );
    println!(
        "  {}  JSON file with embeddings, labels and centroids.",
        "r <bundle.json>".bold().red()
    );
    println!("\nExamples:");
    println!(
        "  {} \"Sunrise over the Maldives\" maldives.png",
        "mediagen i".bold().green()
    );
    println!("  {}", "mediagen v".bold().cyan());
    println!(
        "  {} f645e2df-b639-4264-9bf2-fc7bceb6c658",
        "mediagen s".bold().magenta()
    );
    println!("  {} rankings.json", "mediagen r".bold().red());
    println!("{:━^60}", "".yellow());
}

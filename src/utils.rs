use crate::constants::{
    Command, CMD_IMAGE, CMD_RANK, CMD_STATUS, CMD_VIDEO, DEFAULT_ASPECT_RATIO, DEFAULT_IMAGE_FILE,
    DEFAULT_NEGATIVE_PROMPT, DEFAULT_OUTPUT_FORMAT, DEFAULT_TASK_ID, IMAGE_API_URL,
    IMAGE_OUTPUT_DIR, IMAGE_TOKEN_VAR, RUNWAY_VERSION, RUNWAY_VERSION_HEADER, TASKS_API_URL,
    TOP_PER_CLUSTER, VIDEO_OUTPUT_DIR, VIDEO_TOKEN_VAR,
};
use crate::images::{GenerationInput, ImageGenerationRequest, ImageGenerationResponse};
use crate::rank::{compute_scores, top_per_cluster, RankingBundle};
use crate::videos::{TaskDownload, VideoTask};
use chrono::Local;
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::{
    header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE},
    Client, StatusCode,
};
use std::{env, error::Error, fs, path::Path};

pub fn build_headers(token_var: &str) -> Result<HeaderMap, Box<dyn Error>> {
    let token =
        env::var(token_var).map_err(|_| format!("{} environment variable not set", token_var))?;
    let mut headers = HeaderMap::new();
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", token))?,
    );
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    Ok(headers)
}

pub fn create_spinner(color: &str, message: String) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
            .template(&format!("{{spinner:.{}}} {{msg}}", color)),
    );
    spinner.enable_steady_tick(100);
    spinner.set_message(message);

    spinner
}

pub fn build_image_request(
    prompt: &str,
    aspect_ratio: Option<&str>,
    negative_prompt: Option<&str>,
) -> ImageGenerationRequest {
    // A user-supplied negative prompt extends the built-in one rather than
    // replacing it.
    let negative = match negative_prompt {
        Some(user) => format!("{}, {}", user, DEFAULT_NEGATIVE_PROMPT),
        None => DEFAULT_NEGATIVE_PROMPT.to_string(),
    };

    ImageGenerationRequest {
        input: GenerationInput {
            prompt: prompt.to_string(),
            aspect_ratio: aspect_ratio.unwrap_or(DEFAULT_ASPECT_RATIO).to_string(),
            output_format: DEFAULT_OUTPUT_FORMAT.to_string(),
            negative_prompt: negative,
        },
    }
}

/// Bare filenames land in the default image directory; anything with a path
/// separator is used as given.
pub fn image_output_path(name: &str) -> String {
    if Path::new(name).components().count() == 1 {
        format!("{}/{}", IMAGE_OUTPUT_DIR, name)
    } else {
        name.to_string()
    }
}

pub fn video_filename() -> String {
    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    format!("generated_video_{}.mp4", timestamp)
}

fn task_id_arg(args: &[String]) -> String {
    args.get(2)
        .cloned()
        .unwrap_or_else(|| DEFAULT_TASK_ID.to_string())
}

pub fn parse_command(args: &[String]) -> Result<Command, Box<dyn Error>> {
    match args[1].as_str() {
        CMD_IMAGE => {
            let prompt = args.get(2).ok_or("image generation requires a prompt")?;
            let output_path = image_output_path(
                args.get(3).map(String::as_str).unwrap_or(DEFAULT_IMAGE_FILE),
            );
            let request = build_image_request(
                prompt,
                args.get(4).map(String::as_str),
                args.get(5).map(String::as_str),
            );
            Ok(Command::Image {
                request,
                output_path,
            })
        }
        CMD_VIDEO => Ok(Command::Video {
            task_id: task_id_arg(args),
        }),
        CMD_STATUS => Ok(Command::Status {
            task_id: task_id_arg(args),
        }),
        CMD_RANK => {
            let bundle_path = args.get(2).ok_or("ranking requires a bundle file")?;
            Ok(Command::Rank {
                bundle_path: bundle_path.clone(),
            })
        }
        _ => {
            // No recognized option: the whole argument list is an image prompt.
            let request = build_image_request(&args[1..].join(" "), None, None);
            Ok(Command::Image {
                request,
                output_path: image_output_path(DEFAULT_IMAGE_FILE),
            })
        }
    }
}

pub async fn download_file(
    client: &Client,
    url: &str,
    output_path: &Path,
) -> Result<(), Box<dyn Error>> {
    log::debug!("Downloading {} to {}", url, output_path.display());
    let response = client.get(url).send().await?;

    if !response.status().is_success() {
        return Err(format!(
            "Failed to download {}: status code {}",
            url,
            response.status()
        )
        .into());
    }

    let bytes = response.bytes().await?;
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(output_path, &bytes)?;
    log::info!("Downloaded {} bytes to {}", bytes.len(), output_path.display());
    Ok(())
}

pub async fn process_image_request(
    client: &Client,
    request: &ImageGenerationRequest,
    api_url: &str,
    output_path: &str,
) -> Result<(), Box<dyn Error>> {
    let headers = build_headers(IMAGE_TOKEN_VAR)?;
    let spinner = create_spinner("red", "Generating image...".to_string());

    let response = client
        .post(api_url)
        .headers(headers)
        .header("Prefer", "wait")
        .json(request)
        .send()
        .await?;

    spinner.finish_and_clear();

    if !response.status().is_success() {
        eprintln!("Failed with status code: {}", response.status());
        if let Ok(error_message) = response.text().await {
            eprintln!("Response error message: {}", error_message);
        }
        return Err("Failed to generate image".into());
    }

    let api_response = response.json::<ImageGenerationResponse>().await?;
    let url = api_response.output.into_url();
    log::info!("Generated image URL: {}", url);

    download_file(client, &url, Path::new(output_path)).await?;
    println!("Saved {}", output_path);
    Ok(())
}

pub async fn retrieve_task(
    client: &Client,
    tasks_url: &str,
    task_id: &str,
) -> Result<VideoTask, Box<dyn Error>> {
    let headers = build_headers(VIDEO_TOKEN_VAR)?;
    let spinner = create_spinner("cyan", "Retrieving task...".to_string());

    let response = client
        .get(format!("{}/{}", tasks_url, task_id))
        .headers(headers)
        .header(RUNWAY_VERSION_HEADER, RUNWAY_VERSION)
        .send()
        .await?;

    spinner.finish_and_clear();

    if !response.status().is_success() {
        eprintln!("Failed with status code: {}", response.status());
        if let Ok(error_message) = response.text().await {
            eprintln!("Response error message: {}", error_message);
        }
        return Err("Failed to retrieve task".into());
    }

    Ok(response.json::<VideoTask>().await?)
}

/// Downloads the first output of a finished task into `output_dir` under a
/// timestamped filename. A task that is not `SUCCEEDED` with output, or a
/// download that does not come back 200, is skipped with a reason instead of
/// failing the run.
pub async fn download_task_output(
    client: &Client,
    task: &VideoTask,
    output_dir: &Path,
) -> Result<TaskDownload, Box<dyn Error>> {
    log::debug!("Task {} reported status {}", task.id, task.status);
    let video_url = match task.output.as_deref() {
        Some([first, ..]) if task.status == "SUCCEEDED" => first,
        _ => {
            return Ok(TaskDownload::Skipped(format!(
                "Task not completed successfully. Status: {}",
                task.status
            )))
        }
    };

    let filepath = output_dir.join(video_filename());
    fs::create_dir_all(output_dir)?;
    println!("Downloading video to: {}", filepath.display());

    let response = client.get(video_url.as_str()).send().await?;
    if response.status() != StatusCode::OK {
        return Ok(TaskDownload::Skipped(format!(
            "Failed to download video. Status code: {}",
            response.status().as_u16()
        )));
    }

    let bytes = response.bytes().await?;
    fs::write(&filepath, &bytes)?;

    let size_mb = fs::metadata(&filepath)?.len() as f64 / (1024.0 * 1024.0);
    println!("Video downloaded successfully: {}", filepath.display());
    println!("File size: {:.2} MB", size_mb);
    Ok(TaskDownload::Saved(filepath))
}

pub fn status_report(task: &VideoTask) -> String {
    let mut report = String::new();
    report.push_str(&format!("Status: {}\n", task.status));

    let progress = task
        .progress
        .map_or("N/A".to_string(), |p| p.to_string());
    report.push_str(&format!("Progress: {}\n", progress));

    match task.status.as_str() {
        "SUCCEEDED" => {
            report.push_str("Video generation completed!\n");
            if let Some(output) = &task.output {
                report.push_str(&format!("Video URL: {}\n", output.join(" ")));
            }
        }
        "FAILED" => {
            report.push_str("Video generation failed\n");
            report.push_str(&format!(
                "Error: {}\n",
                task.error.as_deref().unwrap_or("Unknown error")
            ));
        }
        "RUNNING" => report.push_str("Video is still being generated...\n"),
        other => report.push_str(&format!("Status: {}\n", other)),
    }

    report
}

pub fn process_rank(bundle_path: &str) -> Result<(), Box<dyn Error>> {
    let content = fs::read_to_string(bundle_path)?;
    let bundle: RankingBundle = serde_json::from_str(&content)?;

    let k = bundle.centroids.len();
    let scores = compute_scores(&bundle.embeddings, &bundle.labels, &bundle.centroids);
    let selected = top_per_cluster(&scores, &bundle.labels, k);

    println!(
        "Selected {} of {} items across {} clusters (top {} each)",
        selected.len(),
        bundle.labels.len(),
        k,
        TOP_PER_CLUSTER
    );
    println!("Selected indices: {:?}", selected);
    Ok(())
}

pub async fn process_command(
    client: &Client,
    args: &[String],
) -> Result<(), Box<dyn Error>> {
    match parse_command(args)? {
        Command::Image {
            request,
            output_path,
        } => process_image_request(client, &request, IMAGE_API_URL, &output_path).await,
        Command::Video { task_id } => {
            let task = retrieve_task(client, TASKS_API_URL, &task_id).await?;
            match download_task_output(client, &task, Path::new(VIDEO_OUTPUT_DIR)).await? {
                TaskDownload::Saved(_) => {}
                TaskDownload::Skipped(reason) => eprintln!("{}", reason),
            }
            Ok(())
        }
        Command::Status { task_id } => {
            println!("Checking status of task: {}", task_id);
            let task = retrieve_task(client, TASKS_API_URL, &task_id).await?;
            print!("{}", status_report(&task));
            Ok(())
        }
        Command::Rank { bundle_path } => process_rank(&bundle_path),
    }
}

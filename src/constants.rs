use crate::images::ImageGenerationRequest;

pub const IMAGE_API_URL: &str =
    "https://api.replicate.com/v1/models/black-forest-labs/flux-1.1-pro/predictions";
pub const TASKS_API_URL: &str = "https://api.runwayml.com/v1/tasks";
pub const RUNWAY_VERSION_HEADER: &str = "X-Runway-Version";
pub const RUNWAY_VERSION: &str = "2024-11-06";

pub const IMAGE_TOKEN_VAR: &str = "REPLICATE_API_TOKEN";
pub const VIDEO_TOKEN_VAR: &str = "RUNWAYML_API_SECRET";

pub const DEFAULT_TASK_ID: &str = "f645e2df-b639-4264-9bf2-fc7bceb6c658";
pub const DEFAULT_ASPECT_RATIO: &str = "4:5";
pub const DEFAULT_OUTPUT_FORMAT: &str = "png";
pub const DEFAULT_IMAGE_FILE: &str = "generated_image.png";

// Always sent: overlay text is added in a later watermarking step, so the
// model must not paint its own.
pub const DEFAULT_NEGATIVE_PROMPT: &str = "text, watermark, writing, letters, words, typography, \
signs, labels, captions, overlay text, generated text, \
AI text, embedded text, lowres, jpeg artifacts, plastic, \
logo, duplicate, deformed, bad anatomy, nsfw, inappropriate";

pub const IMAGE_OUTPUT_DIR: &str = "images";
pub const VIDEO_OUTPUT_DIR: &str = "video_outputs";

pub const TOP_PER_CLUSTER: usize = 5;

pub const CMD_IMAGE: &str = "i";
pub const CMD_VIDEO: &str = "v";
pub const CMD_STATUS: &str = "s";
pub const CMD_RANK: &str = "r";

pub enum Command {
    Image {
        request: ImageGenerationRequest,
        output_path: String,
    },
    Video {
        task_id: String,
    },
    Status {
        task_id: String,
    },
    Rank {
        bundle_path: String,
    },
}

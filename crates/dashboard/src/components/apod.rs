use mission_common::{ApodImage, MediaType};

use super::loader::render_loader;
use crate::utils::markup::escape_html;

/// Image-of-the-day carousel, or the loader until it has been fetched
pub fn render_image_of_the_day(apod: Option<&ApodImage>) -> String {
    let Some(image) = apod else {
        return render_loader();
    };

    match image.media_type {
        MediaType::Video => render_video(image),
        MediaType::Image | MediaType::Other => render_still(image),
    }
}

fn render_video(image: &ApodImage) -> String {
    format!(
        r#"
<div id="myCarousel" class="carousel slide" data-ride="carousel">
    <div class="carousel-inner">
        <div class="carousel-item active">
            <div class="view">
                <div class="video-container">
                    <iframe src="{}&amp;autoplay=1&amp;loop=1&amp;controls=0" frameborder="0" allowfullscreen></iframe>
                </div>
            </div>
            <div class="carousel-caption">
                <div class="animated fadeInDown">
                    <p>NASA - Astronomy Video Of the Day</p>
                    <h3 class="h3-responsive">{}</h3>
                </div>
            </div>
        </div>
    </div>
</div>"#,
        escape_html(&image.url),
        escape_html(&image.title),
    )
}

fn render_still(image: &ApodImage) -> String {
    format!(
        r#"
<div id="myCarousel" class="carousel slide" data-ride="carousel">
    <div class="carousel-inner">
        <div class="carousel-item active">
            <img class="first-slide" src="{}" alt="{}">
            <div class="container">
                <div class="carousel-caption text-left">
                    <p>NASA - Astronomy Picture Of the Day</p>
                    <h1>{}</h1>
                    <p class="md-col-12 explanation">{}</p>
                </div>
            </div>
        </div>
    </div>
</div>"#,
        escape_html(&image.url),
        escape_html(&image.title),
        escape_html(&image.title),
        escape_html(&image.explanation),
    )
}

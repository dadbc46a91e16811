use std::{
    ffi::OsStr,
    path::{Component, Path, PathBuf},
};

use image::GenericImageView;
use tracing::{debug, info};

use crate::arg_parsers::Point;
use crate::decode::decode;
use crate::encode::encode;
use crate::image::Image;
use crate::operations::{compute_position, fit, paste, rounded_aspect_ratio};
use crate::settings::Settings;
use crate::utils::filename::prefixed_file_name;
use crate::{error::ImposeError, im_err};

/// Resize `mark` to fit `size` and paste it onto `background` at `location`,
/// writing the result to `output_name` inside the output directory.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacePlan {
    pub output_name: PathBuf,
    pub background: PathBuf,
    pub mark: PathBuf,
    pub size: Point,
    pub location: Point,
}

impl PlacePlan {
    /// Parses the size and location specs; a malformed spec is a fatal error.
    pub fn new(
        output_name: PathBuf,
        background: PathBuf,
        mark: PathBuf,
        size_spec: &OsStr,
        location_spec: &OsStr,
    ) -> Result<Self, ImposeError> {
        let size = parse_point_arg("size", size_spec)?;
        let location = parse_point_arg("location", location_spec)?;
        Ok(Self {
            output_name,
            background,
            mark,
            size,
            location,
        })
    }

    /// Runs the whole workflow and returns the status line for the user.
    pub fn execute(&self, settings: &Settings) -> Result<String, ImposeError> {
        let background = decode(&self.background)?;
        let mut mark = decode(&self.mark)?;
        fit(&mut mark, self.size, settings.filter)?;
        self.paste_and_save(background, &mark, settings)
    }

    /// Second half of the workflow, for a mark that has already been fitted to `self.size`.
    fn paste_and_save(
        &self,
        mut background: Image,
        fitted_mark: &Image,
        settings: &Settings,
    ) -> Result<String, ImposeError> {
        paste(&mut background, fitted_mark, self.location);
        let output = output_path(settings, &self.output_name)?;
        encode(&background, &output, settings)?;
        info!(output = %output.display(), "saved composited image");
        Ok(format!(
            "Placed image '{}' on '{}'.",
            self.mark.display(),
            self.background.display()
        ))
    }
}

/// Stamp `mark` into the bottom-right corner of `background`.
#[derive(Debug, Clone, PartialEq)]
pub struct WatermarkPlan {
    pub background: PathBuf,
    pub mark: PathBuf,
}

impl WatermarkPlan {
    pub fn new(background: PathBuf, mark: PathBuf) -> Self {
        Self { background, mark }
    }

    /// Name of the file written into the output directory
    pub fn output_name(&self, settings: &Settings) -> PathBuf {
        PathBuf::from(prefixed_file_name(&settings.watermark_prefix, &self.mark))
    }

    /// Runs the workflow and returns the status lines for the user, in order.
    pub fn execute(&self, settings: &Settings) -> Result<Vec<String>, ImposeError> {
        let background = decode(&self.background)?;
        let mut mark = decode(&self.mark)?;
        fit(&mut mark, settings.watermark_box, settings.filter)?;

        let background_size = background.pixels.dimensions();
        let aspect_ratio = rounded_aspect_ratio(background_size.0, background_size.1);
        let location = compute_position(
            Point::from(background_size),
            Point::from(mark.pixels.dimensions()),
            aspect_ratio,
            settings.padding_unit,
        );

        // The placement is an ordinary place with a fixed size. The images are already
        // decoded and the mark already fitted, so they are handed over instead of reopened.
        let place = PlacePlan {
            output_name: self.output_name(settings),
            background: self.background.clone(),
            mark: self.mark.clone(),
            size: settings.watermark_box,
            location,
        };
        debug!(?place, "placing watermark");
        let placed = place.paste_and_save(background, &mark, settings)?;

        Ok(vec![
            placed,
            format!(
                "Added watermark '{}' to image '{}' with dimensions {}.",
                self.mark.display(),
                self.background.display(),
                settings.watermark_box
            ),
        ])
    }
}

fn parse_point_arg(arg_name: &str, value: &OsStr) -> Result<Point, ImposeError> {
    Point::try_from(value)
        .map_err(|arg_err| im_err!("{}", arg_err.display_with_arg(arg_name, value)))
}

/// Joins `output_name` onto the output directory. Names that could leave the directory
/// (absolute paths, drive prefixes, `..`) are rejected.
fn output_path(settings: &Settings, output_name: &Path) -> Result<PathBuf, ImposeError> {
    let escapes = output_name.components().any(|component| {
        matches!(
            component,
            Component::RootDir | Component::Prefix(_) | Component::ParentDir
        )
    });
    if escapes || output_name.as_os_str().is_empty() {
        return Err(im_err!(
            "output name '{}' must be a relative path inside '{}'",
            output_name.display(),
            settings.output_dir.display()
        ));
    }
    if settings.create_output_dir {
        std::fs::create_dir_all(&settings.output_dir).map_err(|error| {
            im_err!(
                "failed to create output directory '{}': {error}",
                settings.output_dir.display()
            )
        })?;
    }
    Ok(settings.output_dir.join(output_name))
}

use crate::Error;

/// file name of the snapshot taken after `tick`
pub fn frame_path(directory: &std::path::Path, tick: u64) -> std::path::PathBuf {
    directory.join(format!("frame_{:08}.png", tick))
}

/// write an image surface as PNG
pub fn write_png(image: &cairo::ImageSurface, path: &std::path::Path) -> Result<(), Error> {
    let file = std::fs::File::create(path)?;
    let mut writer = std::io::BufWriter::new(file);
    image.write_to_png(&mut writer)?;
    Ok(())
}

/// writes every n-th frame of an animation into a directory
pub struct FrameWriter {
    directory: std::path::PathBuf,
    frame_every: u64,
    written: u64,
}

impl FrameWriter {
    pub fn new<P: Into<std::path::PathBuf>>(directory: P, frame_every: u64) -> Result<Self, Error> {
        if frame_every == 0 {
            return Err(Error::InvalidConfig("frame_every must not be 0"));
        }

        let directory = directory.into();
        std::fs::create_dir_all(&directory)?;
        log::info!("writing frames to {}", directory.display());

        Ok(Self {
            directory,
            frame_every,
            written: 0,
        })
    }

    /// write the image if `tick` is a multiple of `frame_every`
    pub fn on_tick(&mut self, tick: u64, image: &cairo::ImageSurface) -> Result<bool, Error> {
        if tick % self.frame_every != 0 {
            return Ok(false);
        }

        let path = frame_path(&self.directory, tick);
        write_png(image, &path)?;
        self.written += 1;

        log::debug!("wrote {}", path.display());
        Ok(true)
    }

    pub fn written(&self) -> u64 {
        self.written
    }

    pub fn directory(&self) -> &std::path::Path {
        &self.directory
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path() {
        assert_eq!(
            frame_path(std::path::Path::new("out"), 42),
            std::path::Path::new("out/frame_00000042.png")
        );
    }

    #[test]
    fn every_nth() {
        let tmp = tempfile::TempDir::new().unwrap();
        let image = canvasdemo_graphics::Viewport::new(8, 8)
            .create_surface()
            .unwrap();
        let mut writer = FrameWriter::new(tmp.path().join("frames"), 3).unwrap();

        for tick in 1..=10 {
            writer.on_tick(tick, &image).unwrap();
        }

        assert_eq!(writer.written(), 3);
        let mut names: Vec<_> = std::fs::read_dir(writer.directory())
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect();
        names.sort();
        assert_eq!(
            names,
            vec![
                "frame_00000003.png",
                "frame_00000006.png",
                "frame_00000009.png"
            ]
        );
    }

    #[test]
    fn zero_interval() {
        let tmp = tempfile::TempDir::new().unwrap();
        assert!(FrameWriter::new(tmp.path(), 0).is_err());
    }
}

use anyhow::Result;

#[cfg(feature = "cli")]
mod main {
    use super::*;
    use anyhow::{Context, bail};
    use clap::{Parser, Subcommand};
    use impact_simd::{Matrix4, Vector3, Vector4, backend};

    #[derive(Debug, Parser)]
    #[command(about = "Inspect the impact_simd vector and matrix library", long_about = None)]
    struct Cli {
        #[command(subcommand)]
        command: Command,
    }

    #[derive(Debug, Subcommand)]
    enum Command {
        /// Print the lane backend the library was compiled with
        Backend,
        /// Compose a transform and optionally apply it to a point
        Transform {
            /// Translation as `x,y,z`
            #[arg(long, value_parser = parse_vector3, allow_hyphen_values = true)]
            translation: Option<Vector3>,

            /// Scaling factors as `x,y,z`
            #[arg(long, value_parser = parse_vector3, allow_hyphen_values = true)]
            scaling: Option<Vector3>,

            /// Rotation about the x-axis in degrees
            #[arg(long, allow_hyphen_values = true)]
            rotation_x: Option<f32>,

            /// Rotation about the y-axis in degrees
            #[arg(long, allow_hyphen_values = true)]
            rotation_y: Option<f32>,

            /// Rotation about the z-axis in degrees
            #[arg(long, allow_hyphen_values = true)]
            rotation_z: Option<f32>,

            /// Point to transform, as `x,y,z`
            #[arg(long, value_parser = parse_vector3, allow_hyphen_values = true)]
            point: Option<Vector3>,
        },
        /// Project a point with an orthographic or perspective projection
        Project {
            #[command(subcommand)]
            projection: Projection,

            /// Point to project, as `x,y,z`
            #[arg(long, value_parser = parse_vector3, allow_hyphen_values = true, global = true)]
            point: Option<Vector3>,
        },
    }

    #[derive(Debug, Subcommand)]
    enum Projection {
        /// Orthographic projection of the given view box
        Orthographic {
            #[arg(long, allow_hyphen_values = true)]
            left: f32,
            #[arg(long, allow_hyphen_values = true)]
            right: f32,
            #[arg(long, allow_hyphen_values = true)]
            bottom: f32,
            #[arg(long, allow_hyphen_values = true)]
            top: f32,
            #[arg(long, allow_hyphen_values = true)]
            near: f32,
            #[arg(long, allow_hyphen_values = true)]
            far: f32,
        },
        /// Perspective projection
        Perspective {
            /// Vertical field of view in degrees
            #[arg(long)]
            fov: f32,
            /// Width divided by height
            #[arg(long, default_value_t = 1.0)]
            aspect_ratio: f32,
            #[arg(long)]
            near: f32,
            #[arg(long)]
            far: f32,
        },
    }

    pub fn main() -> Result<()> {
        env_logger::init();

        let cli = Cli::parse();
        log::debug!("Parsed arguments: {cli:?}");

        match cli.command {
            Command::Backend => {
                let backend = backend();
                log::info!("Library compiled with the {backend} backend");
                println!("{backend}");
            }
            Command::Transform {
                translation,
                scaling,
                rotation_x,
                rotation_y,
                rotation_z,
                point,
            } => {
                let mut transform = Matrix4::identity();
                if let Some(translation) = translation {
                    transform *= Matrix4::from_translation(&translation);
                }
                if let Some(scaling) = scaling {
                    transform *= Matrix4::from_scaling(&scaling);
                }
                if let Some(angle) = rotation_x {
                    transform.rotate_x_degrees(angle);
                }
                if let Some(angle) = rotation_y {
                    transform.rotate_y_degrees(angle);
                }
                if let Some(angle) = rotation_z {
                    transform.rotate_z_degrees(angle);
                }
                log::info!("Composed transform {transform:?}");

                print_matrix(&transform);

                if let Some(point) = point {
                    let transformed = transform.transform_point(&point);
                    println!(
                        "point: ({}, {}, {})",
                        transformed.x(),
                        transformed.y(),
                        transformed.z()
                    );
                }
            }
            Command::Project { projection, point } => {
                let matrix = match projection {
                    Projection::Orthographic {
                        left,
                        right,
                        bottom,
                        top,
                        near,
                        far,
                    } => {
                        if left == right || bottom == top || near == far {
                            bail!("The orthographic view box must have a nonzero extent");
                        }
                        Matrix4::orthographic(left, right, bottom, top, near, far)
                    }
                    Projection::Perspective {
                        fov,
                        aspect_ratio,
                        near,
                        far,
                    } => {
                        if fov.is_nan() || fov <= 0.0 || fov >= 180.0 {
                            bail!("Field of view must be between 0 and 180 degrees, got {fov}");
                        }
                        if near.is_nan() || far.is_nan() || near <= 0.0 || far <= near {
                            bail!("Expected 0 < near < far, got near = {near} and far = {far}");
                        }
                        Matrix4::perspective_degrees(fov, aspect_ratio, near, far)
                    }
                };

                print_matrix(&matrix);

                let point = point.context("Missing the `--point` to project")?;
                let clip = matrix * point.extended(1.0);
                log::debug!("Clip-space position {clip:?}");
                let ndc = clip.xyz() / clip.w();
                print_vector4("clip", &clip);
                println!("ndc:  ({}, {}, {})", ndc.x(), ndc.y(), ndc.z());
            }
        }
        Ok(())
    }

    fn parse_vector3(arg: &str) -> Result<Vector3> {
        let components = arg
            .split(',')
            .map(|component| {
                component
                    .trim()
                    .parse::<f32>()
                    .with_context(|| format!("Invalid vector component `{component}`"))
            })
            .collect::<Result<Vec<_>>>()?;

        match components[..] {
            [x, y, z] => Ok(Vector3::new(x, y, z)),
            _ => bail!(
                "Expected three comma-separated components, got {}",
                components.len()
            ),
        }
    }

    fn print_matrix(matrix: &Matrix4) {
        for i in 0..4 {
            let row = matrix.row(i);
            println!(
                "[{:>10.4} {:>10.4} {:>10.4} {:>10.4}]",
                row.x(),
                row.y(),
                row.z(),
                row.w()
            );
        }
    }

    fn print_vector4(label: &str, vector: &Vector4) {
        println!(
            "{label}: ({}, {}, {}, {})",
            vector.x(),
            vector.y(),
            vector.z(),
            vector.w()
        );
    }
}

#[cfg(not(feature = "cli"))]
mod main {
    use super::*;

    pub fn main() -> Result<()> {
        anyhow::bail!("This binary requires the `cli` feature to be enabled.")
    }
}

fn main() -> Result<()> {
    main::main()
}

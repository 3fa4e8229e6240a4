#[non_exhaustive]
pub struct ReplicateModelVersion;

impl ReplicateModelVersion {
    pub const STABLE_DIFFUSION: &str =
        "ac732df83cea7fff18b8472768c88ad041fa750ff7682a21affe81863cbe77e4";
}

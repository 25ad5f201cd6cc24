mod assets;
pub(crate) mod bootstrap;
mod presenter;
mod runtime;
mod surface;

pub(crate) use assets::asset_resource;
pub(crate) use presenter::LogPresenter;
pub(crate) use runtime::DemoRuntime;
pub(crate) use surface::DemoSurface;

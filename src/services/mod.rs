pub mod nginx;

pub use nginx::{
    generate_server_block, load_template, render_template, Location, ServerBlock, TemplateError,
    TemplateOptions,
};

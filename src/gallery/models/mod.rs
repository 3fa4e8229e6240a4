pub mod displayed_image;

fn main() {
    video_modal::start();
}

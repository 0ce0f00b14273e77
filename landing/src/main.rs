// InvenScan landing page entry point (built with trunk)

fn main() {
    invenscan_landing::start();
}

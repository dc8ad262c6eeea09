//! USB gadget tables
//!
//! The device-side USB port exposes a handful of fixed product
//! configurations; the host picks by product id. Pure data, consumed
//! by the gadget stack.

use egersis_core::config::{UsbFunction, UsbGadgetConfig, UsbProduct};

use crate::pins;

const STORAGE_DEBUG: &[UsbFunction] = &[UsbFunction::DebugBridge, UsbFunction::MassStorage];
const STORAGE_ONLY: &[UsbFunction] = &[UsbFunction::MassStorage];
const NET_ONLY: &[UsbFunction] = &[UsbFunction::EthernetBridge];
const NET_DEBUG: &[UsbFunction] = &[UsbFunction::EthernetBridge, UsbFunction::DebugBridge];

pub const PRODUCTS: &[UsbProduct] = &[
    UsbProduct {
        product_id: 0x9025,
        functions: STORAGE_DEBUG,
    },
    UsbProduct {
        product_id: 0x9026,
        functions: STORAGE_ONLY,
    },
    UsbProduct {
        product_id: 0xf00e,
        functions: NET_ONLY,
    },
    UsbProduct {
        product_id: 0x9024,
        functions: NET_DEBUG,
    },
];

pub const GADGET: UsbGadgetConfig = UsbGadgetConfig {
    vendor_id: 0x0bb4,
    default_product_id: 0x0c01,
    manufacturer: "RoverPC",
    product_name: "Handheld Gadget",
    serial_number: "1234567890ABCDEF",
    products: PRODUCTS,
    pullup_pin: pins::USB_PULLUP,
    vbus_pin: pins::OTG_ID,
    vbus_inverted: true,
};

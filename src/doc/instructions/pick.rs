/*!
# `PICK`

## Purpose
Pick up the key under the robot.

## Remarks
Does nothing off a key tile or when already holding a key. The key tile
becomes floor.

In worlds with several keys only one may open the door. Picking up a
wrong key still clears its tile but leaves the robot without a key.

*/
